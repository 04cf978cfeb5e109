//! Winshim demo
//!
//! Opens a window and logs every device event. W toggles fullscreen and
//! X closes.

use log::error;

#[cfg(target_os = "windows")]
mod windows_main {
    use log::info;
    use winshim::input::keys::{key_name, KEY_W, KEY_X};
    use winshim::input::{DeviceEvent, DeviceEventKind};
    use winshim::{Display, DisplayConfig, DisplayStatus, InputSink, WindowControl};

    /// Logs events and reacts to the demo keys
    #[derive(Default)]
    struct Demo {
        quit: bool,
    }

    impl InputSink for Demo {
        fn handle_input(&mut self, event: DeviceEvent, window: &mut dyn WindowControl) {
            let name = || key_name(event.data).unwrap_or_else(|| format!("{:#04x}", event.data));
            match event.kind {
                DeviceEventKind::FocusIn => info!("Focus gained"),
                DeviceEventKind::FocusOut => info!("Focus lost"),
                DeviceEventKind::Resize => info!("Resized to {:?}", window.size()),
                DeviceEventKind::Scroll => info!("Scrolled {}", event.data),
                DeviceEventKind::Down => {
                    info!("{} pressed", name());
                    match event.data {
                        KEY_W => window.toggle_fullscreen(),
                        KEY_X => self.quit = true,
                        _ => {}
                    }
                }
                DeviceEventKind::Up => info!("{} released", name()),
            }
        }
    }

    pub fn run() -> anyhow::Result<()> {
        info!("Starting winshim demo");

        let mut display = Display::init(&DisplayConfig::default())?;
        display.set_title("Test Window");
        display.set_size(600, 200, 600, 400);

        let mut demo = Demo::default();
        while !demo.quit && display.process_input(&mut demo) == DisplayStatus::Active {
            display.swap_buffers();
        }

        display.dispose();
        Ok(())
    }
}

#[cfg(not(target_os = "windows"))]
mod stub_main {
    use super::*;
    use winshim::{Display, DisplayConfig};

    pub fn run() -> anyhow::Result<()> {
        let display = Display::init(&DisplayConfig::default())
            .inspect_err(|err| error!("Winshim requires Windows to run: {}", err))?;
        display.dispose();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(target_os = "windows")]
    {
        windows_main::run()
    }

    #[cfg(not(target_os = "windows"))]
    {
        stub_main::run()
    }
}
