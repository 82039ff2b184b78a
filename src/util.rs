// Console logging and clock-field padding helpers

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    // Console only exists in the browser; native test builds stay silent
    if cfg!(target_arch = "wasm32") {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

pub fn cerror(msg: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::error_1(&JsValue::from_str(msg));
    }
}

/// Prefix a "0" to anything below ten. Negatives keep their sign after the
/// prefix, so `-5` renders as `"0-5"`.
pub fn pad_below_ten(value: i64) -> String {
    if value < 10 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}

/// Zero renders as `"00"`, anything above nine renders bare, the rest gets a "0" prefix.
pub fn pad_nonzero(value: i64) -> String {
    if value == 0 {
        "00".to_string()
    } else if value > 9 {
        value.to_string()
    } else {
        format!("0{value}")
    }
}

pub fn pad_above_nine(value: i64) -> String {
    if value > 9 {
        value.to_string()
    } else {
        format!("0{value}")
    }
}
