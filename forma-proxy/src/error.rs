use crate::presentation::PresentationProp;
use forma_model::Value;
use thiserror::Error;

pub type ProxyResult<T> = Result<T, ProxyError>;

#[derive(Debug, Error, PartialEq)]
pub enum ProxyError {
    #[error("no field named '{0}'")]
    UnknownField(String),

    #[error("unknown presentation property: {0}")]
    UnknownProperty(String),

    #[error("invalid value for {field}.{prop}: {value}")]
    InvalidValue {
        field: String,
        prop: PresentationProp,
        value: Value,
    },
}
