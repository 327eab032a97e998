// JSON writer interface used by every encoder.
// - `JsonSink` mirrors a streaming generator: open/close containers, named scalars.
// - `ValueSink` builds a `serde_json::Value` tree (member order preserved).
// - `TextSink` writes compact JSON text directly into a `String`.
// Scalar names are ignored inside arrays. Non-finite floats become `null`
// here; encoders route floats through `numeric::write_float` first.
use serde_json::{Map, Number, Value};
use std::fmt::Write as _;

pub trait JsonSink {
    /// Open an object, as member `name` of the enclosing object or as an anonymous value.
    fn begin_object(&mut self, name: Option<&str>);
    /// Open an array, as member `name` of the enclosing object or as an anonymous value.
    fn begin_array(&mut self, name: Option<&str>);
    /// Close the innermost open object or array.
    fn end(&mut self);
    fn write_str(&mut self, name: &str, value: &str);
    fn write_i64(&mut self, name: &str, value: i64);
    fn write_f64(&mut self, name: &str, value: f64);
    fn write_bool(&mut self, name: &str, value: bool);
}

#[derive(Debug, Default)]
pub struct ValueSink {
    stack: Vec<(Option<String>, Value)>,
    root: Option<Value>,
}

impl ValueSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished document; `Value::Null` if nothing was written.
    /// Containers left open are closed first.
    pub fn into_value(mut self) -> Value {
        while !self.stack.is_empty() {
            self.end();
        }
        self.root.unwrap_or(Value::Null)
    }

    fn attach(&mut self, name: Option<&str>, value: Value) {
        match self.stack.last_mut() {
            Some((_, Value::Object(map))) => {
                map.insert(name.unwrap_or_default().to_string(), value);
            }
            Some((_, Value::Array(items))) => items.push(value),
            // only containers are ever pushed
            Some(_) => {}
            None => self.root = Some(value),
        }
    }
}

impl JsonSink for ValueSink {
    fn begin_object(&mut self, name: Option<&str>) {
        self.stack
            .push((name.map(str::to_string), Value::Object(Map::new())));
    }

    fn begin_array(&mut self, name: Option<&str>) {
        self.stack
            .push((name.map(str::to_string), Value::Array(Vec::new())));
    }

    fn end(&mut self) {
        if let Some((name, value)) = self.stack.pop() {
            self.attach(name.as_deref(), value);
        }
    }

    fn write_str(&mut self, name: &str, value: &str) {
        self.attach(Some(name), Value::String(value.to_string()));
    }

    fn write_i64(&mut self, name: &str, value: i64) {
        self.attach(Some(name), Value::Number(value.into()));
    }

    fn write_f64(&mut self, name: &str, value: f64) {
        let v = Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        self.attach(Some(name), v);
    }

    fn write_bool(&mut self, name: &str, value: bool) {
        self.attach(Some(name), Value::Bool(value));
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    object: bool,
    empty: bool,
}

#[derive(Debug, Default)]
pub struct TextSink {
    out: String,
    frames: Vec<Frame>,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    // Separator plus `"name":` when the enclosing container is an object.
    fn member(&mut self, name: Option<&str>) {
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        if !frame.empty {
            self.out.push(',');
        }
        frame.empty = false;
        if frame.object {
            write!(self.out, "\"{}\":", escape_json(name.unwrap_or_default())).ok();
        }
    }

    fn open(&mut self, name: Option<&str>, object: bool) {
        self.member(name);
        self.out.push(if object { '{' } else { '[' });
        self.frames.push(Frame {
            object,
            empty: true,
        });
    }
}

impl JsonSink for TextSink {
    fn begin_object(&mut self, name: Option<&str>) {
        self.open(name, true);
    }

    fn begin_array(&mut self, name: Option<&str>) {
        self.open(name, false);
    }

    fn end(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.out.push(if frame.object { '}' } else { ']' });
        }
    }

    fn write_str(&mut self, name: &str, value: &str) {
        self.member(Some(name));
        write!(self.out, "\"{}\"", escape_json(value)).ok();
    }

    fn write_i64(&mut self, name: &str, value: i64) {
        self.member(Some(name));
        write!(self.out, "{}", value).ok();
    }

    fn write_f64(&mut self, name: &str, value: f64) {
        self.member(Some(name));
        match Number::from_f64(value) {
            Some(n) => write!(self.out, "{}", n).ok(),
            None => write!(self.out, "null").ok(),
        };
    }

    fn write_bool(&mut self, name: &str, value: bool) {
        self.member(Some(name));
        self.out.push_str(if value { "true" } else { "false" });
    }
}

fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                write!(&mut out, "\\u{:04x}", c as u32).ok();
            }
            c => out.push(c),
        }
    }
    out
}
