use serde_json::{Map, Value};

use crate::database::StoredBeneficio;

/// Public wire format of a record: the stored fields plus `id`.
pub fn beneficio_to_api_value(record: &StoredBeneficio) -> Value {
    let mut object = Map::with_capacity(record.document.len() + 1);
    object.insert("id".to_string(), Value::String(record.id.to_string()));
    for (key, value) in &record.document {
        if key != "id" {
            object.insert(key.clone(), value.clone());
        }
    }
    Value::Object(object)
}

pub fn beneficios_to_api_values(records: &[StoredBeneficio]) -> Vec<Value> {
    records.iter().map(beneficio_to_api_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::RecordId;
    use serde_json::json;

    #[test]
    fn includes_id_alongside_document_fields() {
        let id = RecordId::generate();
        let document = match json!({ "nome": "Cesta Básica", "pontos": 10 }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let value = beneficio_to_api_value(&StoredBeneficio { id, document });

        assert_eq!(value["id"], id.to_string());
        assert_eq!(value["nome"], "Cesta Básica");
        assert_eq!(value["pontos"], 10);
    }
}
