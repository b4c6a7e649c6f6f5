use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{codec::Base32Codec, config::DecodeConfig, length, result::GenericResult};

#[repr(i32)]
#[derive(Serialize_repr, Deserialize_repr, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    #[default]
    Success = 0,
    DecodeError = -3,
    UnknownMethodError = -5,
    InvalidArgumentsError = -6,
    LengthError = -8,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceOk<T> {
    pub code: Code,
    pub result: T,
}

impl<T> ServiceOk<T> {
    fn success(result: T) -> Self {
        ServiceOk {
            code: Code::Success,
            result,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceError<'a> {
    pub code: Code,
    pub error: Cow<'a, str>,
}

impl<'a> ServiceError<'a> {
    fn error(code: Code, error: Cow<'a, str>) -> Self {
        ServiceError { code, error }
    }
}

type ServiceResult<'a, T> = GenericResult<ServiceOk<T>, ServiceError<'a>>;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Param<'a> {
    #[serde(borrow)]
    input: Cow<'a, str>,
    length: usize,
    config: DecodeConfig,
}

/// JSON method dispatcher over the codec. Transport is up to the caller.
pub struct Base32Service;

impl Base32Service {
    /// Wrap Ok(T) or Err(E) into a JSON result with the provided error code.
    fn wrap_result<'a, T, E: ToString>(res: Result<T, E>, rc: Code) -> ServiceResult<'a, T> {
        match res {
            Ok(v) => ServiceResult::ok(ServiceOk::success(v)),
            Err(e) => ServiceResult::err(ServiceError::error(rc, Cow::Owned(e.to_string()))),
        }
    }

    /// Base32 encode helper
    pub fn encode_base32<'a>(input: Cow<'a, str>) -> ServiceResult<'a, String> {
        log::info!("Encoding base32 input: {input}");
        ServiceResult::ok(ServiceOk::success(
            Base32Codec::default().encode(input.as_bytes()),
        ))
    }

    /// Base32 decode helper, the decoded bytes must be UTF-8.
    pub fn decode_base32<'a>(
        input: Cow<'a, str>,
        config: DecodeConfig,
    ) -> ServiceResult<'a, String> {
        log::info!("Decoding base32 input: {input}");
        let res = Base32Codec::new(config)
            .decode(input.as_bytes())
            .map_err(|e| e.to_string())
            .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()));

        Self::wrap_result(res, Code::DecodeError)
    }

    pub fn encoded_length<'a>(length: usize) -> ServiceResult<'a, usize> {
        log::info!("Sizing base32 output for {length} bytes");
        Self::wrap_result(length::checked_encoded_length(length), Code::LengthError)
    }

    pub fn decoded_length<'a>(input: Cow<'a, str>) -> ServiceResult<'a, usize> {
        log::info!("Sizing decoded output for base32 input: {input}");
        Self::wrap_result(length::decoded_length(input.as_bytes()), Code::LengthError)
    }

    pub fn call(method: &str, args: &Value) -> Value {
        let param: Param = match Param::deserialize(args) {
            Ok(p) => p,
            Err(e) => {
                return ServiceResult::<()>::err(ServiceError::error(
                    Code::InvalidArgumentsError,
                    Cow::Owned(e.to_string()),
                ))
                .into();
            }
        };

        match method {
            "encode32" => Self::encode_base32(param.input).into(),
            "decode32" => Self::decode_base32(param.input, param.config).into(),
            "encoded-length" => Self::encoded_length(param.length).into(),
            "decoded-length" => Self::decoded_length(param.input).into(),
            _ => {
                let msg = format!("Unknown method called: {method}");
                log::warn!("{msg}");
                ServiceResult::<()>::err(ServiceError::error(
                    Code::UnknownMethodError,
                    Cow::Owned(msg),
                ))
                .into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Base32Service;
    use serde_json::{Value, json};

    #[test]
    fn test_encode32() {
        let res = Base32Service::call("encode32", &json!({ "input": "foobar" }));
        assert_eq!(res, json!({ "code": 0, "result": "MZXW6YTBOI======" }));
    }

    #[test]
    fn test_decode32() {
        let res = Base32Service::call("decode32", &json!({ "input": "mzxw6ytboi======" }));
        assert_eq!(res, json!({ "code": 0, "result": "foobar" }));
    }

    #[test]
    fn test_decode32_with_config() {
        let args = json!({ "input": "mzxw6ytb", "config": { "case": "upper-only" } });
        let res = Base32Service::call("decode32", &args);
        assert_eq!(res["code"], json!(-3));
        assert_eq!(
            res["error"],
            json!("Invalid base32 character 0x6d at offset 0")
        );

        let args = json!({ "input": "MZ======", "config": { "trailing-bits": "lenient" } });
        let res = Base32Service::call("decode32", &args);
        assert_eq!(res, json!({ "code": 0, "result": "f" }));
    }

    #[test]
    fn test_decode32_errors() {
        let res = Base32Service::call("decode32", &json!({ "input": "MZXW6YT" }));
        assert_eq!(
            res,
            json!({ "code": -3, "error": "Invalid base32 length: 7" })
        );

        let res = Base32Service::call("decode32", &json!({ "input": "MZXW6YT=" }));
        assert_eq!(
            res,
            json!({ "code": -3, "error": "Invalid base32 padding at offset 6" })
        );
    }

    #[test]
    fn test_decode32_non_utf8() {
        // 0xFF
        let res = Base32Service::call("decode32", &json!({ "input": "74======" }));
        assert_eq!(res["code"], json!(-3));
        assert!(res["error"].is_string());
    }

    #[test]
    fn test_lengths() {
        let res = Base32Service::call("encoded-length", &json!({ "length": 6 }));
        assert_eq!(res, json!({ "code": 0, "result": 16 }));

        let res = Base32Service::call("decoded-length", &json!({ "input": "MZXW6YQ=" }));
        assert_eq!(res, json!({ "code": 0, "result": 4 }));

        let res = Base32Service::call("decoded-length", &json!({ "input": "MZX" }));
        assert_eq!(
            res,
            json!({ "code": -8, "error": "Invalid base32 length: 3" })
        );
    }

    #[test]
    fn test_decoded_length_rejects_what_decode_rejects() {
        for input in ["!!!!!!!!", "MY======MZXW6YTB"] {
            let res = Base32Service::call("decoded-length", &json!({ "input": input }));
            assert_eq!(res["code"], json!(-8), "Failed for {input}");
            let res = Base32Service::call("decode32", &json!({ "input": input }));
            assert_eq!(res["code"], json!(-3), "Failed for {input}");
        }
    }

    #[test]
    fn test_missing_args_use_defaults() {
        let res = Base32Service::call("encode32", &json!({}));
        assert_eq!(res, json!({ "code": 0, "result": "" }));
    }

    #[test]
    fn test_invalid_arguments() {
        let res = Base32Service::call("encode32", &json!({ "input": 42 }));
        assert_eq!(res["code"], json!(-6));

        let res = Base32Service::call("encode32", &Value::Null);
        assert_eq!(res["code"], json!(-6));
    }

    #[test]
    fn test_unknown_method() {
        let res = Base32Service::call("encode64", &json!({ "input": "f" }));
        assert_eq!(
            res,
            json!({ "code": -5, "error": "Unknown method called: encode64" })
        );
    }
}
