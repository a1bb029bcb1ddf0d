//! One-shot hardware peripheral initialization.
//!
//! Configures the six matrix output lines and the ADC1 oneshot unit using
//! raw ESP-IDF sys calls.  Called once from `main()` before the scan loop
//! starts; every addressing and reading helper below assumes it has run.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc)    => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the scan loop; single-threaded.
    unsafe {
        init_gpio_outputs()?;
        init_adc()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = pins::COLUMN_GPIOS
        .iter()
        .chain(pins::SENSOR_ROW_GPIOS.iter())
        .chain(pins::HEATER_ROW_GPIOS.iter());

    for &pin in output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        // Every column and row line starts de-energised.
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: matrix outputs configured (cols={:?}, sensors={:?}, heaters={:?})",
        pins::COLUMN_GPIOS, pins::SENSOR_ROW_GPIOS, pins::HEATER_ROW_GPIOS);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe { gpio_set_level(pin, if high { 1 } else { 0 }); }
}

// Host: output levels live in a per-thread bitmask indexed by GPIO number,
// so parallel tests each see their own board.
#[cfg(not(target_os = "espidf"))]
std::thread_local! {
    static SIM_PINS: core::cell::Cell<u64> = const { core::cell::Cell::new(0) };
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) {
    let bit = 1u64 << pin;
    SIM_PINS.with(|pins| {
        let levels = pins.get();
        pins.set(if high { levels | bit } else { levels & !bit });
    });
}

/// Level last written to `pin` on this thread (host simulation only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_pin_level(pin: i32) -> bool {
    SIM_PINS.with(|pins| pins.get() & (1u64 << pin) != 0)
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// scan-loop read path.  No concurrent access is possible because
/// `init_adc()` completes before the scan loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    // 12 dB attenuation → ~0 – 3.1 V full scale against the internal reference.
    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for &channel in &pins::SENSOR_ADC_CHANNELS {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }
    }

    info!("hw_init: ADC1 configured (row channels={:?})", pins::SENSOR_ADC_CHANNELS);
    Ok(())
}

/// Sample from one `adc_oneshot_read` result: `None` unless the driver
/// returned `ESP_OK` (0).  Negative raw values floor at zero.
pub fn oneshot_sample(rc: i32, raw: i32) -> Option<u16> {
    (rc == 0).then(|| raw.clamp(0, i32::from(u16::MAX)) as u16)
}

/// Single-shot conversion on `channel`.
///
/// `adc_oneshot_read` blocks until the conversion completes.  It is issued
/// once, with no retry: a failed or stalled conversion halts the scan
/// loop here (until the task watchdog resets the chip).
#[cfg(target_os = "espidf")]
pub fn adc1_convert_blocking(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    match oneshot_sample(ret, raw) {
        Some(sample) => sample,
        None => {
            log::error!("adc: conversion on channel {} failed (rc={}), halting", channel, ret);
            loop {
                core::hint::spin_loop();
            }
        }
    }
}
