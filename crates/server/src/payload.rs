//! Hand-written request payloads and field validation.
//!
//! Payloads are built from raw JSON values so a malformed body and a body
//! that fails validation both land on the same 400 path, with failures
//! collected per field.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// Field-level validation errors, serialized as `{field: [messages]}`.
#[derive(Debug, Default, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|v| v.as_slice())
    }
}

fn required_string(body: &Value, field: &str, errs: &mut FieldErrors) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errs.push(field, "missing required field");
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errs.push(field, "must be a string");
            None
        }
    }
}

fn required_f64(body: &Value, field: &str, errs: &mut FieldErrors) -> Option<f64> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errs.push(field, "missing required field");
            None
        }
        Some(v) => match v.as_f64() {
            Some(n) => Some(n),
            None => {
                errs.push(field, "must be a number");
                None
            }
        },
    }
}

fn required_i32(body: &Value, field: &str, errs: &mut FieldErrors) -> Option<i32> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errs.push(field, "missing required field");
            None
        }
        Some(v) => match v.as_i64().and_then(|n| i32::try_from(n).ok()) {
            Some(n) => Some(n),
            None => {
                errs.push(field, "must be an integer");
                None
            }
        },
    }
}

fn required_date(body: &Value, field: &str, errs: &mut FieldErrors) -> Option<NaiveDate> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errs.push(field, "missing required field");
            None
        }
        Some(Value::String(s)) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                errs.push(field, "must be a date in YYYY-MM-DD format");
                None
            }
        },
        Some(_) => {
            errs.push(field, "must be a date string");
            None
        }
    }
}

#[derive(Debug)]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl CustomerPayload {
    pub fn from_value(body: &Value) -> Result<Self, FieldErrors> {
        let mut errs = FieldErrors::default();
        let name = required_string(body, "name", &mut errs);
        if let Some(n) = &name {
            if n.trim().is_empty() {
                errs.push("name", "must not be empty");
            }
        }
        let email = required_string(body, "email", &mut errs);
        let address = required_string(body, "address", &mut errs);
        match (name, email, address) {
            (Some(name), Some(email), Some(address)) if errs.is_empty() => {
                Ok(Self { name, email, address })
            }
            _ => Err(errs),
        }
    }
}

#[derive(Debug)]
pub struct ProductPayload {
    pub product_name: String,
    pub price: f64,
}

impl ProductPayload {
    pub fn from_value(body: &Value) -> Result<Self, FieldErrors> {
        let mut errs = FieldErrors::default();
        let product_name = required_string(body, "product_name", &mut errs);
        if let Some(n) = &product_name {
            if n.trim().is_empty() {
                errs.push("product_name", "must not be empty");
            }
        }
        let price = required_f64(body, "price", &mut errs);
        if let Some(p) = price {
            if p < 0.0 {
                errs.push("price", "must be greater than or equal to 0");
            }
        }
        match (product_name, price) {
            (Some(product_name), Some(price)) if errs.is_empty() => {
                Ok(Self { product_name, price })
            }
            _ => Err(errs),
        }
    }
}

#[derive(Debug)]
pub struct OrderPayload {
    pub order_date: NaiveDate,
    pub customer_id: i32,
}

impl OrderPayload {
    pub fn from_value(body: &Value) -> Result<Self, FieldErrors> {
        let mut errs = FieldErrors::default();
        let order_date = required_date(body, "order_date", &mut errs);
        let customer_id = required_i32(body, "customer_id", &mut errs);
        match (order_date, customer_id) {
            (Some(order_date), Some(customer_id)) if errs.is_empty() => {
                Ok(Self { order_date, customer_id })
            }
            _ => Err(errs),
        }
    }
}
