use structq::{prelude::*, value::Value};
use time::{Date, OffsetDateTime, PrimitiveDateTime};

#[derive(Filter)]
struct Everything {
    a: bool,
    b: i8,
    c: i16,
    d: i64,
    e: isize,
    f: u16,
    g: u64,
    h: usize,
    i: f32,
    j: f64,
    k: String,
    l: Box<str>,
    m: Vec<u32>,
    n: Option<Vec<String>>,
    o: Date,
    p: PrimitiveDateTime,
    q: OffsetDateTime,
    r: Value,
    #[filter(op = "not between")]
    s: Vec<Date>,
}

fn main() {}
