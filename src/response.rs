//! 响应归一化
//!
//! 把传输层结果分类为：传输失败 / 非法 JSON / API 错误 / 成功，
//! 并对成功 payload 的 subdivisions 做归一化。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::errors::{GeolookupError, Result};
use crate::transport::{TransportError, TransportResponse};

/// 查询结果
///
/// 除 `subdivisions` / `most_specific_subdivision` 外，payload 的其余字段
/// （country、city、location、traits 等）原样透传，不做 schema 校验。
///
/// 不变量：`subdivisions` 永远存在（缺失时为空数组）；非空时
/// `most_specific_subdivision` 等于它的最后一个元素（远端按从粗到细排序）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(default)]
    pub subdivisions: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_specific_subdivision: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl LookupResult {
    /// 读取任意透传字段
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// `country.iso_code`，ISO 3166-1 alpha-2 国家代码 (e.g., "CN", "US")
    pub fn country_iso_code(&self) -> Option<&str> {
        self.fields.get("country")?.get("iso_code")?.as_str()
    }

    /// `city.names.en`，英文城市名
    pub fn city_name(&self) -> Option<&str> {
        self.fields.get("city")?.get("names")?.get("en")?.as_str()
    }

    /// 归一化构造：
    /// - subdivisions 缺失 / null / 非数组 / 空数组统一为空数组
    /// - 非空时 most_specific_subdivision 取最后一个元素
    /// - payload 自带的 most_specific_subdivision 仅在无法派生时保留
    fn from_payload(mut fields: Map<String, Value>) -> Self {
        let subdivisions = match fields.remove("subdivisions") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };

        let carried = match fields.remove("most_specific_subdivision") {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        };
        let most_specific_subdivision = subdivisions.last().cloned().or(carried);

        Self {
            subdivisions,
            most_specific_subdivision,
            fields,
        }
    }
}

/// 分类传输层结果，顺序固定：
/// 1. 传输失败 → `RequestFailed`
/// 2. body 去除空白后解析 JSON，失败（包括空 body）→ `InvalidData`
/// 3. payload 含 `error` 字段 → `Api`（优先于其余一切字段）
/// 4. 其余按成功处理，做 subdivisions 归一化
pub fn normalize_response(
    outcome: std::result::Result<TransportResponse, TransportError>,
) -> Result<LookupResult> {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => return Err(GeolookupError::request_failed(err.to_string())),
    };

    let payload: Value = serde_json::from_str(response.body.trim())?;

    if let Some(detail) = payload.get("error") {
        let code = payload
            .get("code")
            .map(|c| c.as_str().map(String::from).unwrap_or_else(|| c.to_string()));
        let message = detail
            .as_str()
            .map(String::from)
            .unwrap_or_else(|| detail.to_string());
        return Err(GeolookupError::api(code, message));
    }

    let Value::Object(fields) = payload else {
        return Err(GeolookupError::invalid_data("payload is not a JSON object"));
    };

    let result = LookupResult::from_payload(fields);
    trace!(
        "lookup payload normalized ({} subdivisions)",
        result.subdivisions.len()
    );
    Ok(result)
}
