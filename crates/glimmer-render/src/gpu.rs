mod context;
mod readback;
mod types;

pub use context::*;
pub use readback::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_adapter_not_found_display() {
        let err = RenderError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn render_error_device_display() {
        let err = RenderError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn render_error_readback_display() {
        let err = RenderError::ReadbackError("map failed".to_string());
        assert_eq!(err.to_string(), "readback error: map failed");
    }
}
