mod common;

mod tests {
    use embassy_futures::block_on;
    use embassy_time::Duration;
    use rgbw_color_mode::boot::read_channels;
    use rgbw_color_mode::{
        BootInference, BootReconciler, ChannelIntensities, LightMode, TransportError,
    };

    use super::common::{MockTransport, approx_eq};

    const NO_DELAY: Duration = Duration::from_millis(0);

    #[test]
    fn test_infers_color_when_white_is_off() {
        let channels = ChannelIntensities {
            warm: 0,
            cold: 0,
            red: 255,
            green: 0,
            blue: 0,
        };
        let inference = BootInference::from_channels(&channels);
        assert_eq!(inference.mode(), LightMode::Color);
        let BootInference::Color { hue, saturation } = inference else {
            panic!("expected color, got {inference:?}");
        };
        assert!(approx_eq(hue, 0.0, 1e-6));
        assert!(approx_eq(saturation, 1.0, 1e-6));
    }

    #[test]
    fn test_infers_temperature_from_warm() {
        let channels = ChannelIntensities::from_white(128, 127);
        let inference = BootInference::from_channels(&channels);
        assert_eq!(inference.mode(), LightMode::Temperature);
        let BootInference::Temperature { temperature } = inference else {
            panic!("expected temperature, got {inference:?}");
        };
        assert!(approx_eq(temperature, 0.5, 1e-6));
    }

    #[test]
    fn test_cold_only_is_temperature() {
        let inference = BootInference::from_channels(&ChannelIntensities::from_white(0, 255));
        assert_eq!(inference, BootInference::Temperature { temperature: 0.0 });
    }

    #[test]
    fn test_all_off_resolves_to_color() {
        let inference = BootInference::from_channels(&ChannelIntensities::OFF);
        assert_eq!(
            inference,
            BootInference::Color {
                hue: 0.0,
                saturation: 0.0
            }
        );
    }

    #[test]
    fn test_failed_reads_count_as_off() {
        let transport = MockTransport::new(3).with_readings([
            Err(TransportError::Timeout),
            Err(TransportError::Unavailable),
            Ok(255),
            Err(TransportError::Timeout),
            Ok(0),
        ]);
        let channels = block_on(read_channels(&transport));
        assert_eq!(
            channels,
            ChannelIntensities {
                warm: 0,
                cold: 0,
                red: 255,
                green: 0,
                blue: 0,
            }
        );
    }

    #[test]
    fn test_reads_run_concurrently() {
        let transport = MockTransport::new(3)
            .with_readings([Ok(1), Ok(2), Ok(3), Ok(4), Ok(5)])
            .with_read_delay(Duration::from_millis(20));
        let channels = block_on(read_channels(&transport));

        assert_eq!(transport.max_reads_in_flight(), 5);
        assert_eq!(
            channels,
            ChannelIntensities {
                warm: 1,
                cold: 2,
                red: 3,
                green: 4,
                blue: 5,
            }
        );
    }

    #[test]
    fn test_reconcile_with_every_read_failing() {
        let transport =
            MockTransport::new(3).with_readings([Err(TransportError::Timeout); 5]);
        let inference = block_on(BootReconciler::new(NO_DELAY).reconcile(&transport));
        assert_eq!(inference.mode(), LightMode::Color);
    }

    #[test]
    fn test_reconcile_temperature() {
        let transport =
            MockTransport::new(3).with_readings([Ok(128), Ok(127), Ok(0), Ok(0), Ok(0)]);
        let inference =
            block_on(BootReconciler::new(Duration::from_millis(10)).reconcile(&transport));
        assert_eq!(inference, BootInference::Temperature { temperature: 0.5 });
    }
}
