#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_halt as _;
use rtic::app;

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use chip8_clock::{
        config::{PANEL_DEVICES, PANEL_INTENSITY, SPI_BAUD_HZ, START_TIME, XTAL_FREQ_HZ},
        panel::Max7219Panel,
        ticker::{ClockedDelayTimer, CountdownTicker, MicrosSource},
        ClockLoop, Layout, Renderer,
    };
    use max7219::{connectors::SpiConnectorSW, MAX7219};
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::RateExtU32,
        gpio::{FunctionSio, FunctionSpi, Pin, PullDown, SioOutput},
        sio::Sio,
        spi::Spi,
        timer::Timer,
        watchdog::Watchdog,
    };

    type Spi0 = Spi<rp_pico::hal::spi::Enabled, rp_pico::hal::pac::SPI0, (
        Pin<rp_pico::hal::gpio::bank0::Gpio19, FunctionSpi, PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio16, FunctionSpi, PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio18, FunctionSpi, PullDown>
    )>;
    type CsPin = Pin<rp_pico::hal::gpio::bank0::Gpio17, FunctionSio<SioOutput>, PullDown>;
    type Panel = Max7219Panel<SpiConnectorSW<Spi0, CsPin>>;
    type PanelTicker = CountdownTicker<ClockedDelayTimer<PicoMicros>>;

    /// Low word of the RP2040's 1 MHz timer.
    pub struct PicoMicros(Timer);

    impl MicrosSource for PicoMicros {
        fn now_micros(&mut self) -> u32 {
            self.0.get_counter_low()
        }
    }

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        clock: ClockLoop<Panel, PanelTicker>,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let mosi = pins.gpio19.into_function::<FunctionSpi>();
        let sck = pins.gpio18.into_function::<FunctionSpi>();
        let miso = pins.gpio16.into_function::<FunctionSpi>();
        let cs = pins.gpio17.into_push_pull_output();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck));
        let spi = spi.init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            SPI_BAUD_HZ.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let driver = MAX7219::from_spi_cs(PANEL_DEVICES, spi, cs).unwrap();
        let panel = Max7219Panel::new(driver, PANEL_INTENSITY).unwrap();

        let ticker = CountdownTicker::new(ClockedDelayTimer::new(PicoMicros(timer)));
        let clock = ClockLoop::with_state(START_TIME, Renderer::new(Layout::PANEL), panel, ticker);

        defmt::info!("panel up, {=usize} devices", PANEL_DEVICES);

        (Shared {}, Local { clock }, init::Monotonics())
    }

    // The whole clock is one blocking loop; no interrupts are needed.
    #[idle(local = [clock])]
    fn idle(ctx: idle::Context) -> ! {
        match ctx.local.clock.run() {
            Ok(never) => match never {},
            Err(_) => {
                defmt::error!("MAX7219 write failed, halting");
                loop {
                    cortex_m::asm::wfi();
                }
            }
        }
    }
}
