use criterion::{criterion_group, criterion_main, Criterion};
use jxon::JsonParser;

fn make_large(json: &str) -> String {
    let mut large = String::from("{");
    for i in 0..10000 {
        if large.len() > 1 {
            large.push(',');
        }
        large.push_str(&format!(r#""{}":"#, i));
        large.push_str(json);
    }
    large.push('}');
    large
}

fn jxon_parse(json_bytes: &[u8]) {
    let mut parser = JsonParser::new();
    parser.parse(json_bytes).unwrap();
    parser.get_result().unwrap();
}

const SAMPLE: &str = r#"{"a":1,"b":[true,false,null,"hello world",0.1,-42],"c":{"nested":"value"}}"#;

fn jxon_benchmark(c: &mut Criterion) {
    let json_bytes = SAMPLE.as_bytes();

    let json_large = make_large(SAMPLE);
    let json_large_bytes = json_large.as_bytes();

    c.bench_function("jxon", |b| {
        b.iter(|| {
            jxon_parse(json_bytes);
        })
    });

    c.bench_function("jxon_large", |b| {
        b.iter(|| {
            jxon_parse(json_large_bytes);
        })
    });

    c.bench_function("serde", |b| {
        b.iter(|| {
            let _: serde_json::Value = serde_json::from_slice(json_bytes).unwrap();
        })
    });

    c.bench_function("serde_large", |b| {
        b.iter(|| {
            let _: serde_json::Value = serde_json::from_slice(json_large_bytes).unwrap();
        })
    });
}

/// Compares this crate's shortest-round-trip `f64::to_string` number
/// formatting (used by the serializer) against `dtoa`'s Grisu-based
/// formatter, which the teacher crate used for the same purpose.
fn number_formatting_benchmark(c: &mut Criterion) {
    let numbers: Vec<f64> = vec![0.1, 2.0, -788.0, 123456789.123456, 3.14159, -0.0001];

    c.bench_function("format_f64_to_string", |b| {
        b.iter(|| {
            for &n in &numbers {
                std::hint::black_box(n.to_string());
            }
        })
    });

    c.bench_function("format_f64_dtoa", |b| {
        let mut buf = dtoa::Buffer::new();
        b.iter(|| {
            for &n in &numbers {
                std::hint::black_box(buf.format(n));
            }
        })
    });
}

criterion_group!(benches, jxon_benchmark, number_formatting_benchmark);
criterion_main!(benches);
