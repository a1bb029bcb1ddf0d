//! Sensor subsystem.
//!
//! Every point's sensor is a thermistor divider behind the row selector;
//! the selected row's divider is routed to its own ADC1 channel.  The
//! [`adc::AdcSampler`] performs the conversions.

pub mod adc;
