//! Result sets decoded from successful replies.

use serde::Serialize;
use serde_json::Value;

use crate::error::RequestFailure;
use crate::format::parse_numeric;
use crate::input::ResultKind;

/// One bank's value in an aggregate reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub bank: String,
    pub value: f64,
}

/// A single-bank reply, fields kept as received. Absent fields are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleResult {
    pub bank: Option<Value>,
    pub amount: Option<Value>,
    pub term_days: Option<Value>,
    pub value: Option<Value>,
}

/// Shape of a result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultBody {
    /// Per-bank values, in the order the API listed them.
    Aggregate(Vec<AggregateRow>),
    Single(SingleResult),
}

/// A successful reply, tagged with what it holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    pub kind: ResultKind,
    #[serde(flatten)]
    pub body: ResultBody,
}

impl ResultSet {
    #[must_use]
    pub fn aggregate(kind: ResultKind, rows: Vec<AggregateRow>) -> Self {
        Self {
            kind,
            body: ResultBody::Aggregate(rows),
        }
    }

    #[must_use]
    pub fn single(kind: ResultKind, single: SingleResult) -> Self {
        Self {
            kind,
            body: ResultBody::Single(single),
        }
    }

    /// Aggregate rows, if this is an aggregate result.
    #[must_use]
    pub fn rows(&self) -> Option<&[AggregateRow]> {
        match &self.body {
            ResultBody::Aggregate(rows) => Some(rows),
            ResultBody::Single(_) => None,
        }
    }

    /// The single-bank record, if this is a single result.
    #[must_use]
    pub fn single_result(&self) -> Option<&SingleResult> {
        match &self.body {
            ResultBody::Single(single) => Some(single),
            ResultBody::Aggregate(_) => None,
        }
    }
}

/// Decode a `{ "resultados": { label: value, ... } }` body.
///
/// Key order is preserved. An absent or non-object `resultados` is an empty
/// result; a body that is not JSON is unrecognized.
pub fn decode_aggregate(kind: ResultKind, status: u16, body: &str) -> Result<ResultSet, RequestFailure> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| RequestFailure::Unrecognized { status })?;

    let rows = match value.get("resultados") {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(bank, value)| AggregateRow {
                bank: bank.clone(),
                value: parse_numeric(value),
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(ResultSet::aggregate(kind, rows))
}

/// Decode a `{ banco, monto, plazo_en_dias, roi | tasa }` body.
///
/// The body must be a JSON object; missing fields are allowed.
pub fn decode_single(kind: ResultKind, status: u16, body: &str) -> Result<ResultSet, RequestFailure> {
    let Ok(Value::Object(mut map)) = serde_json::from_str::<Value>(body) else {
        return Err(RequestFailure::Unrecognized { status });
    };

    let single = SingleResult {
        bank: map.remove("banco"),
        amount: map.remove("monto"),
        term_days: map.remove("plazo_en_dias"),
        value: map.remove(kind.value_field()),
    };

    Ok(ResultSet::single(kind, single))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aggregate_preserves_key_order() {
        let body = r#"{"resultados":{"Zeta":1.5,"Alfa":2,"Beta":"3.456"}}"#;
        let set = decode_aggregate(ResultKind::Roi, 200, body).unwrap();
        let rows = set.rows().unwrap();
        let banks: Vec<_> = rows.iter().map(|r| r.bank.as_str()).collect();
        assert_eq!(banks, ["Zeta", "Alfa", "Beta"]);
        assert!((rows[2].value - 3.456).abs() < 1e-12);
    }

    #[test]
    fn aggregate_missing_resultados_is_empty() {
        let set = decode_aggregate(ResultKind::Rate, 200, "{}").unwrap();
        assert_eq!(set.rows().unwrap().len(), 0);
        assert_eq!(set.kind, ResultKind::Rate);

        let set = decode_aggregate(ResultKind::Rate, 200, r#"{"resultados":null}"#).unwrap();
        assert!(set.rows().unwrap().is_empty());
    }

    #[test]
    fn aggregate_non_numeric_value_is_nan() {
        let set = decode_aggregate(ResultKind::Roi, 200, r#"{"resultados":{"A":"n/a"}}"#).unwrap();
        assert!(set.rows().unwrap()[0].value.is_nan());
    }

    #[test]
    fn aggregate_rejects_non_json() {
        assert_eq!(
            decode_aggregate(ResultKind::Roi, 200, "ok"),
            Err(RequestFailure::Unrecognized { status: 200 })
        );
    }

    #[test]
    fn single_roi_fields() {
        let body = r#"{"banco":"3","monto":1000000,"plazo_en_dias":90,"roi":12345.678}"#;
        let set = decode_single(ResultKind::Roi, 200, body).unwrap();
        let single = set.single_result().unwrap();
        assert_eq!(single.bank, Some(json!("3")));
        assert_eq!(single.amount, Some(json!(1_000_000)));
        assert_eq!(single.term_days, Some(json!(90)));
        assert_eq!(single.value, Some(json!(12345.678)));
        assert!(set.rows().is_none());
    }

    #[test]
    fn single_rate_reads_tasa() {
        let body = r#"{"banco":5,"monto":"500","plazo_en_dias":"30","tasa":9.5,"roi":1}"#;
        let set = decode_single(ResultKind::Rate, 200, body).unwrap();
        assert_eq!(set.single_result().unwrap().value, Some(json!(9.5)));
    }

    #[test]
    fn single_missing_fields() {
        let set = decode_single(ResultKind::Roi, 200, "{}").unwrap();
        let single = set.single_result().unwrap();
        assert!(single.bank.is_none());
        assert!(single.value.is_none());
    }

    #[test]
    fn single_rejects_non_object() {
        assert!(decode_single(ResultKind::Roi, 200, "[1,2]").is_err());
        assert!(decode_single(ResultKind::Roi, 200, "not json").is_err());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let set = ResultSet::aggregate(
            ResultKind::Rate,
            vec![AggregateRow {
                bank: "A".into(),
                value: 1.0,
            }],
        );
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["kind"], "tasa");
        assert_eq!(json["aggregate"][0]["bank"], "A");
    }
}
