//! `log` backend that prints to the JTAG UART.

use core::fmt::Write;

use log::{LevelFilter, Log, Metadata, Record};

use crate::hw::JtagUart;

struct UartLogger;

static LOGGER: UartLogger = UartLogger;

#[cfg(feature = "verbose")]
const MAX_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(feature = "verbose"))]
const MAX_LEVEL: LevelFilter = LevelFilter::Info;

impl Log for UartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let uart = unsafe { JtagUart::new() };
        let _ = writeln!(uart, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Install the UART logger. Call once, before anything logs.
pub unsafe fn init() {
    unsafe {
        // single core, no interrupts: nothing can race the install
        let _ = log::set_logger_racy(&LOGGER);
        log::set_max_level_racy(MAX_LEVEL);
    }
}
