mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_color_music::color::rgb_from_hsv;
    use myrtio_color_music::{
        Bands, DEFAULT_HUE_TABLE, Mode, ModeController, ModeRequest, OutputDriver, RenderConfig,
        Rgb, RxQueue, Visualizer,
    };

    const LEDS: usize = 30;
    const NOTHING: [u8; 0] = [];

    #[derive(Default)]
    struct RecordingDriver {
        writes: Vec<(Vec<Rgb>, u8)>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb], brightness: u8) {
            self.writes.push((colors.to_vec(), brightness));
        }
    }

    fn config() -> RenderConfig {
        RenderConfig::DEFAULT
            .with_led_count(LEDS as u8)
            .with_smoothing(0)
    }

    fn bass() -> Bands {
        Bands([200, 0, 0, 0, 0, 0, 0, 0])
    }

    fn visualizer(request: &ModeRequest) -> Visualizer<'_, RecordingDriver, LEDS> {
        Visualizer::new(&config(), request, RecordingDriver::default())
    }

    #[test]
    fn test_no_frame_skips_render() {
        let request = ModeRequest::new();
        let mut visualizer = visualizer(&request);

        let result = visualizer.tick(Instant::from_millis(0), [0x01, 0x02]);
        assert!(!result.rendered);
        assert!(visualizer.output().writes.is_empty());

        // Half a frame is kept for the next tick
        let wire = bass().to_wire();
        let result = visualizer.tick(Instant::from_millis(11), wire[..4].iter().copied());
        assert!(!result.rendered);
        let result = visualizer.tick(Instant::from_millis(22), wire[4..].iter().copied());
        assert!(result.rendered);
        assert_eq!(visualizer.output().writes.len(), 1);
    }

    #[test]
    fn test_frame_is_rendered_and_written() {
        let request = ModeRequest::new();
        let mut visualizer = visualizer(&request);

        let result = visualizer.tick(Instant::from_millis(0), bass().to_wire());
        assert!(result.rendered);
        assert_eq!(result.mode, Mode::Spectrum);

        let (colors, brightness) = &visualizer.output().writes[0];
        assert_eq!(colors.len(), LEDS);
        assert_eq!(*brightness, 50);
        let red = rgb_from_hsv(DEFAULT_HUE_TABLE[0], 255, 255);
        assert!(colors.iter().all(|&led| led == red));
    }

    #[test]
    fn test_only_newest_frame_is_rendered() {
        let request = ModeRequest::new();
        let mut visualizer = visualizer(&request);

        let mut bytes = Bands([255; 8]).to_wire().to_vec();
        bytes.extend_from_slice(&bass().to_wire());
        visualizer.tick(Instant::from_millis(0), bytes);

        let writes = &visualizer.output().writes;
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].1, 50);
    }

    #[test]
    fn test_stream_command_switches_mode() {
        let request = ModeRequest::new();
        let mut visualizer = visualizer(&request);

        let result = visualizer.tick(Instant::from_millis(1_000), *b"m");
        assert!(!result.rendered);
        assert_eq!(result.mode, Mode::Gradient);

        // Too soon after the first switch
        let result = visualizer.tick(Instant::from_millis(1_050), *b"M");
        assert_eq!(result.mode, Mode::Gradient);

        let result = visualizer.tick(Instant::from_millis(1_200), *b"M");
        assert_eq!(result.mode, Mode::Purple);
    }

    #[test]
    fn test_button_request_switches_mode() {
        let request = ModeRequest::new();
        let mut visualizer = visualizer(&request);

        request.request();
        let result = visualizer.tick(Instant::from_millis(500), NOTHING);
        assert_eq!(result.mode, Mode::Gradient);
        assert!(!request.is_pending());

        // Button and stream command share the debounce window
        request.request();
        let result = visualizer.tick(Instant::from_millis(600), *b"m");
        assert_eq!(result.mode, Mode::Gradient);
        assert!(!request.is_pending());
    }

    #[test]
    fn test_mode_applies_to_same_tick_frame() {
        let request = ModeRequest::new();
        let mut visualizer = visualizer(&request);

        request.request();
        let result = visualizer.tick(Instant::from_millis(0), bass().to_wire());
        assert!(result.rendered);
        assert_eq!(result.mode, Mode::Gradient);

        let (colors, _) = &visualizer.output().writes[0];
        let hsv = visualizer.engine().effects().gradient.pixel(1, &bass());
        assert_eq!(hsv.val, 5);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn test_starting_mode() {
        let request = ModeRequest::new();
        let mut visualizer =
            visualizer(&request).with_modes(ModeController::new(Mode::Ambient));
        visualizer.tick(Instant::from_millis(0), Bands::SILENT.to_wire());

        let (colors, brightness) = &visualizer.output().writes[0];
        assert_eq!(*brightness, 0);
        assert_eq!(colors[0], rgb_from_hsv(0, 255, 255));
        assert_eq!(visualizer.engine().effects().ambient.hue(), 1);
    }

    #[test]
    fn test_frame_pacing() {
        let request = ModeRequest::new();
        let mut visualizer = Visualizer::<_, LEDS>::with_frame_duration(
            &config(),
            &request,
            RecordingDriver::default(),
            Duration::from_millis(10),
        );

        let result = visualizer.tick(Instant::from_millis(0), NOTHING);
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = visualizer.tick(Instant::from_millis(14), NOTHING);
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(6));

        // Within the drift allowance: no sleep, keep the schedule
        let result = visualizer.tick(Instant::from_millis(35), NOTHING);
        assert_eq!(result.next_deadline, Instant::from_millis(30));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));

        // Stalled for long: restart the schedule from now
        let result = visualizer.tick(Instant::from_millis(500), NOTHING);
        assert_eq!(result.next_deadline, Instant::from_millis(510));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_rx_queue_feeds_visualizer() {
        static RX: RxQueue<32> = RxQueue::new();
        let request = ModeRequest::new();
        let mut visualizer = visualizer(&request);

        RX.try_send_slice(&bass().to_wire()[..5]).unwrap();
        let result = visualizer.tick(Instant::from_millis(0), RX.receiver().drain());
        assert!(!result.rendered);

        RX.try_send_slice(&bass().to_wire()[5..]).unwrap();
        let result = visualizer.tick(Instant::from_millis(11), RX.receiver().drain());
        assert!(result.rendered);
        assert!(RX.is_empty());
        assert!(visualizer.decoder().is_idle());
    }
}
