use serde_json::{json, Value as Json};
use sheetdiff_core::Value;

/// Convert a `json!` literal into an engine value.
#[allow(dead_code)]
pub fn v(raw: Json) -> Value {
    Value::from(raw)
}

/// Inspection rows as loaded into the sheet before any edit.
///
/// Keys the backend leaves undefined are simply absent here.
#[allow(dead_code)]
pub fn inspection_rows() -> Json {
    json!([
        {
            "id": 15590,
            "itemName": "123",
            "itemGroupName": "测试",
            "itemValues": [
                {"id": 47, "numItemId": 15590, "inspectValue": "1", "checkConclusion": "1", "sampleIdentification": "样本标识1"},
                {"id": 48, "numItemId": 15590, "inspectValue": "2", "checkConclusion": "0", "sampleIdentification": "样本标识2"}
            ]
        },
        {
            "id": 15591,
            "itemName": "4005唱盘测试",
            "itemGroupName": "唱盘测试",
            "itemValues": [
                {"id": 42, "numItemId": 15591, "inspectValue": "", "checkConclusion": "1"}
            ]
        },
        {
            "id": 15593,
            "itemName": "AM频率范围",
            "itemGroupName": "AM测试",
            "itemValues": [
                {"id": 44, "numItemId": 15593, "inspectValue": null, "checkConclusion": "1"},
                {"id": 45, "numItemId": 15593, "inspectValue": null, "checkConclusion": "0"}
            ]
        }
    ])
}
