//! PASC firmware - Main entry point
//!
//! 1. Take peripherals, open the host UART and the diagnostic UART
//! 2. Run the host handshake once
//! 3. Open the selected ADC backend
//! 4. Hand over to the acquisition loop, which never returns

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

#[cfg(target_os = "espidf")]
mod firmware {
    use core::convert::Infallible;

    use esp_idf_svc::hal::delay::Delay;
    use esp_idf_svc::hal::gpio::AnyIOPin;
    use esp_idf_svc::hal::i2c::{I2cConfig, I2cDriver};
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::uart::{self, UartDriver};
    use esp_idf_svc::hal::units::Hertz;
    use esp_idf_svc::sys::{self, EspError};

    use pasc_firmware::backend::{BackendKind, InputMode};
    use pasc_firmware::channels::{Channel, DiffPair};
    use pasc_firmware::config::BoardConfig;
    use pasc_firmware::gain::Gain;
    use pasc_firmware::globals::{DIAG_LOG, FAULTS};
    use pasc_firmware::hal::internal_adc::InternalAdc;
    use pasc_firmware::hal::serial::UartLink;
    use pasc_firmware::hal::{Ads1x15, Resolution};
    use pasc_firmware::logging::LOG_BUFFER_SIZE;
    use pasc_firmware::uart_logger::{self, init_uart_logger, DiagUart, UartLoggerConfig};
    use pasc_firmware::{AcqError, AcquisitionLoop, Handshake};

    /// Board wiring: ADS1015 differential on AIN0-AIN1.
    const BOARD: BoardConfig = BoardConfig {
        backend: BackendKind::External12Bit,
        mode: InputMode::Differential,
        channels: &[Channel::Pair(DiffPair::A01)],
        ..BoardConfig::DEFAULT
    };

    const _: () = assert!(BOARD.validate().is_ok(), "invalid board description");

    /// I2C bus speed for the ADS1x15.
    const I2C_BAUD_HZ: u32 = 400_000;

    #[allow(dead_code)]
    #[derive(Debug)]
    enum StartupError {
        Esp(EspError),
        Board(AcqError),
    }

    impl From<EspError> for StartupError {
        fn from(e: EspError) -> Self {
            StartupError::Esp(e)
        }
    }

    impl From<AcqError> for StartupError {
        fn from(e: AcqError) -> Self {
            StartupError::Board(e)
        }
    }

    #[no_mangle]
    fn main() {
        // Initialize ESP-IDF
        sys::link_patches();

        // Only returns on a startup failure, already reported if the
        // diagnostic UART was up; nothing to sample then
        let _ = run();

        loop {
            // SAFETY: plain FreeRTOS delay from task context
            unsafe {
                sys::vTaskDelay(1000);
            }
        }
    }

    /// Log a startup failure and flush it to the diagnostic UART.
    fn check<T, E>(result: Result<T, E>, what: &str, diag: &mut DiagUart<'_>) -> Result<T, StartupError>
    where
        E: Into<StartupError>,
    {
        result.map_err(|e| {
            let e = e.into();
            pasc_firmware::diag_error!(DIAG_LOG, 0, "{} failed: {:?}", what, e);
            uart_logger::drain(&DIAG_LOG, diag, LOG_BUFFER_SIZE);
            e
        })
    }

    fn run() -> Result<Infallible, StartupError> {
        let peripherals = Peripherals::take()?;

        let mut diag = init_uart_logger(
            peripherals.uart1,
            peripherals.pins.gpio17,
            &UartLoggerConfig::default(),
        )?;

        let host_uart = check(
            UartDriver::new(
                peripherals.uart0,
                peripherals.pins.gpio43,
                peripherals.pins.gpio44,
                Option::<AnyIOPin>::None, // CTS
                Option::<AnyIOPin>::None, // RTS
                &uart::config::Config::default().baudrate(Hertz(BOARD.baud_rate)),
            ),
            "host UART init",
            &mut diag,
        )?;
        let mut host = UartLink::new(host_uart);

        let (profile, channels) = check(BOARD.build(), "board description", &mut diag)?;
        pasc_firmware::diag_info!(
            DIAG_LOG,
            0,
            "{} with {} channel(s)",
            profile.name(),
            channels.len()
        );

        let config = Handshake::new(&profile, &channels, &DIAG_LOG, &FAULTS)
            .run(&mut host, &mut Delay::new_default());
        uart_logger::drain(&DIAG_LOG, &mut diag, LOG_BUFFER_SIZE);
        uart_logger::report_faults(&FAULTS, &mut diag);

        match Resolution::for_backend(profile.kind) {
            None => {
                let adc = check(InternalAdc::new(&channels), "ADC1 init", &mut diag)?;
                AcquisitionLoop::new(
                    adc,
                    Delay::new_default(),
                    profile,
                    channels,
                    &config,
                    BOARD.read_failure,
                    &DIAG_LOG,
                    &FAULTS,
                )
                .run(&mut host, &mut diag)
            }
            Some(resolution) => {
                let i2c = check(
                    I2cDriver::new(
                        peripherals.i2c0,
                        peripherals.pins.gpio8,
                        peripherals.pins.gpio9,
                        &I2cConfig::new().baudrate(Hertz(I2C_BAUD_HZ)),
                    ),
                    "I2C init",
                    &mut diag,
                )?;
                let gain = config.resolved_gain.unwrap_or(Gain::FALLBACK);
                let adc = Ads1x15::new(i2c, Delay::new_default(), BOARD.i2c_address, resolution, gain);
                AcquisitionLoop::new(
                    adc,
                    Delay::new_default(),
                    profile,
                    channels,
                    &config,
                    BOARD.read_failure,
                    &DIAG_LOG,
                    &FAULTS,
                )
                .run(&mut host, &mut diag)
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("pasc runs on ESP-IDF; build for an espidf target to flash it");
}
