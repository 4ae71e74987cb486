//! One-shot peripheral initialisation and the button ISRs.
//!
//! Configures the two signal outputs and the two button inputs with raw
//! ESP-IDF sys calls, then installs the shared GPIO ISR service and
//! registers one rising-edge handler per button. Called once from
//! `main()` before the tasks start.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::error::Result;

#[cfg(target_os = "espidf")]
use crate::error::Error;
#[cfg(target_os = "espidf")]
use crate::events::BUTTON_EVENTS;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<()> {
    // SAFETY: called once from main() before any task is spawned.
    unsafe {
        init_signal_outputs()?;
        init_button_inputs()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<()> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── Signal outputs ────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_signal_outputs() -> Result<()> {
    for pin in [pins::SIGNAL_A_GPIO, pins::SIGNAL_B_GPIO] {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let rc = unsafe { gpio_config(&cfg) };
        if rc != ESP_OK as i32 {
            return Err(Error::GpioConfig { pin, rc });
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: signal outputs A=GPIO{} B=GPIO{}", pins::SIGNAL_A_GPIO, pins::SIGNAL_B_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level is a single register store on a pin
    // configured as output in init_signal_outputs(); safe from any task.
    unsafe {
        gpio_set_level(pin, u32::from(high));
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── Button inputs ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_button_inputs() -> Result<()> {
    for pin in [pins::BUTTON_ENABLE_GPIO, pins::BUTTON_SELECT_GPIO] {
        // Active-high buttons with external pull resistors.
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_POSEDGE,
        };
        let rc = unsafe { gpio_config(&cfg) };
        if rc != ESP_OK as i32 {
            return Err(Error::GpioConfig { pin, rc });
        }
    }

    info!(
        "hw_init: buttons enable=GPIO{} select=GPIO{} (rising edge)",
        pins::BUTTON_ENABLE_GPIO,
        pins::BUTTON_SELECT_GPIO
    );
    Ok(())
}

// ── GPIO ISR service ──────────────────────────────────────────

/// Runs in interrupt context. `arg` carries the GPIO number the handler
/// was registered for; it is forwarded as the event identifier. A full
/// queue drops the press.
#[cfg(target_os = "espidf")]
unsafe extern "C" fn button_gpio_isr(arg: *mut core::ffi::c_void) {
    BUTTON_EVENTS.try_send(arg as usize as u32);
}

/// Install the per-pin GPIO ISR service and register both button
/// handlers. Call after init_peripherals() and before the tasks run.
#[cfg(target_os = "espidf")]
pub fn init_isr_service() -> Result<()> {
    // SAFETY: ESP_ERR_INVALID_STATE means the service is already
    // installed, which is fine. The handler only calls try_send on a
    // static channel guarded by an ISR-safe critical section.
    unsafe {
        let rc = gpio_install_isr_service(0);
        if rc != ESP_OK as i32 && rc != ESP_ERR_INVALID_STATE as i32 {
            return Err(Error::IsrService(rc));
        }

        for pin in [pins::BUTTON_ENABLE_GPIO, pins::BUTTON_SELECT_GPIO] {
            let rc = gpio_isr_handler_add(pin, Some(button_gpio_isr), pin as usize as *mut _);
            if rc != ESP_OK as i32 {
                return Err(Error::IsrHandler { pin, rc });
            }
        }
    }

    info!("hw_init: ISR service installed (enable, select)");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_isr_service() -> Result<()> {
    log::info!("hw_init(sim): ISR service skipped");
    Ok(())
}
