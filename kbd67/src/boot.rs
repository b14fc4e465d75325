#[cfg(feature = "std")]
use core::sync::atomic::{AtomicUsize, Ordering};

/// Reboots requested so far, hosted builds have no MCU to reset
#[cfg(feature = "std")]
static REBOOT_REQUESTS: AtomicUsize = AtomicUsize::new(0);

/// Jump to the bootloader, QMK `QK_BOOT`.
///
/// The STM32F072 of the kbd67 rev2 enters its ROM DFU bootloader after a
/// reset when the magic word is found, so this boils down to a reset here.
pub fn jump_to_bootloader() {
    warn!("Jumping to bootloader");
    reboot_keyboard();
}

pub fn reboot_keyboard() {
    warn!("Rebooting keyboard!");
    // For cortex-m:
    #[cfg(all(
        target_arch = "arm",
        target_os = "none",
        any(target_abi = "eabi", target_abi = "eabihf")
    ))]
    cortex_m::peripheral::SCB::sys_reset();

    #[cfg(feature = "std")]
    REBOOT_REQUESTS.fetch_add(1, Ordering::Relaxed);
}

/// Number of reboots requested on a hosted build
#[cfg(feature = "std")]
pub fn reboot_requests() -> usize {
    REBOOT_REQUESTS.load(Ordering::Relaxed)
}
