pub mod js_interop;
