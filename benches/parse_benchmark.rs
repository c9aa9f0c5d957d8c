use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rbstep::{escape, parse, translate, CommandParser, RecordedAction};

fn sample_lines() -> Vec<String> {
    let actions = vec![
        RecordedAction::click("css", "#submit", "BUTTON"),
        RecordedAction::typed("name", "q", "INPUT", "criterion \"bench\""),
        RecordedAction::key_press("id", "q", "INPUT", "Enter"),
        RecordedAction::click("xpath", "//a[text()='Next']", "A"),
        RecordedAction::click("xpath", r#"//p[.="it's"]"#, "P"),
    ];
    let mut lines: Vec<String> = actions
        .iter()
        .flat_map(translate)
        .map(|line| line.into_string())
        .collect();
    lines.push("sleep(1.5)".to_string());
    lines.push("this is not ruby code".to_string());
    lines
}

fn parse_benchmark(c: &mut Criterion) {
    let lines = sample_lines();

    c.bench_function("parse_shared_tables", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(parse(black_box(line)));
            }
        })
    });

    c.bench_function("build_parser", |b| b.iter(|| black_box(CommandParser::new())));
}

fn translate_benchmark(c: &mut Criterion) {
    let action = RecordedAction::typed("css", "input[name=\"q\"]", "INPUT", "hello world");

    c.bench_function("translate_type", |b| {
        b.iter(|| black_box(translate(black_box(&action))))
    });

    c.bench_function("escape_concat", |b| {
        b.iter(|| black_box(escape(black_box(r#"//label[text()="Owner's name"]"#))))
    });
}

criterion_group!(benches, parse_benchmark, translate_benchmark);
criterion_main!(benches);
