pub mod apply_makeup_use_case;
pub mod makeup_request;
pub mod pipeline_logger;
