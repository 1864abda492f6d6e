//! Batch-level behavior of the outline engine: ordering, filtering, partial
//! parses, determinism and cancellation.

use outline_core::{
    CancellationToken, LanguageRegistry, LanguageTag, OutlineCache, OutlineConfig, OutlineEngine,
    OutlineError, OutlineRecord, SourceUnit,
};
use std::thread;
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn run(units: &[SourceUnit]) -> Vec<OutlineRecord> {
    let config = OutlineConfig::default();
    let registry = config.registry();
    OutlineEngine::new(config, &registry)
        .unwrap()
        .run(units)
        .unwrap()
}

/// Source for a small file in the language of `path`, declaring `name`
fn sample_source(path: &str, name: &str) -> String {
    match path.rsplit('.').next() {
        Some("py") => format!("def {}():\n    return 1\n", name),
        Some("rs") => format!("pub fn {}() -> u32 {{\n    1\n}}\n", name),
        Some("go") => format!("package main\n\nfunc {}() int {{\n\treturn 1\n}}\n", name),
        Some("ts") => format!("export function {}(): number {{\n  return 1;\n}}\n", name),
        Some("rb") => format!("def {}\n  1\nend\n", name),
        Some("java") => format!("class C {{\n    int {}() {{ return 1; }}\n}}\n", name),
        _ => format!("{} is not code\n", name),
    }
}

#[test]
fn scenario_a_python_outline() {
    init_tracing();
    let registry = LanguageRegistry::empty().with_entry(".py", LanguageTag::Python);
    let engine = OutlineEngine::new(OutlineConfig::default(), &registry).unwrap();
    let units = [SourceUnit::new(
        "a.py",
        "def foo():\n    pass\n\nclass Bar:\n    def baz(self):\n        pass\n",
    )];

    let records = engine.run(&units).unwrap();

    assert_eq!(
        records,
        vec![OutlineRecord::new(
            "a.py",
            "a.py\nfn def foo():\nclass class Bar:\n  method def baz(self):\n"
        )]
    );
}

#[test]
fn scenario_b_unknown_extension_is_skipped() {
    let records = run(&[SourceUnit::new("b.xyz", "whatever")]);
    assert!(records.is_empty());
}

#[test]
fn outline_batch_uses_default_configuration() {
    let units = [
        SourceUnit::from(("notes.txt", "not code")),
        SourceUnit::from(("lib/util.rb", "def helper
  1
end
")),
    ];
    let records = outline_core::outline_batch(&units).unwrap();
    assert_eq!(records, run(&units));
    assert_eq!(records[0].text, "lib/util.rb\nfn def helper\n");
}

#[test]
fn scenario_c_concurrent_batch_keeps_input_order() {
    init_tracing();
    let supported = ["py", "rs", "go", "ts", "rb", "java"];
    let unsupported = ["txt", "md", "toml", "lock"];

    // 60 supported and 40 unsupported files, interleaved
    let mut units = Vec::new();
    let mut expected = Vec::new();
    for i in 0..100 {
        let name = format!("item_{:03}", i);
        let path = if i % 5 < 3 {
            let ext = supported[i % supported.len()];
            let path = format!("src/mod_{}/file_{:03}.{}", i % 7, i, ext);
            expected.push((path.clone(), name.clone()));
            path
        } else {
            format!("docs/note_{:03}.{}", i, unsupported[i % unsupported.len()])
        };
        let content = sample_source(&path, &name);
        units.push(SourceUnit::new(path, content));
    }
    assert_eq!(expected.len(), 60);

    let config = OutlineConfig {
        worker_threads: Some(4),
        ..OutlineConfig::default()
    };
    let registry = config.registry();
    let engine = OutlineEngine::new(config, &registry).unwrap();
    let records = engine.run(&units).unwrap();

    assert_eq!(records.len(), 60);
    for (record, (path, name)) in records.iter().zip(&expected) {
        assert_eq!(&record.path, path);
        assert!(record.text.starts_with(&format!("{}\n", path)));
        assert!(record.text.contains(name.as_str()), "{}:\n{}", path, record.text);
    }
}

#[test]
fn every_record_mentions_its_own_declaration() {
    let units: Vec<_> = ["a.py", "b.rs", "c.go", "d.ts", "e.rb", "f.java"]
        .iter()
        .enumerate()
        .map(|(i, path)| SourceUnit::new(*path, sample_source(path, &format!("decl_{}", i))))
        .collect();

    let records = run(&units);

    assert_eq!(records.len(), units.len());
    for (i, record) in records.iter().enumerate() {
        assert!(
            record.text.contains(&format!("decl_{}", i)),
            "{}:\n{}",
            record.path,
            record.text
        );
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let units: Vec<_> = (0..30)
        .map(|i| {
            let path = format!("pkg/f{}.{}", i, ["py", "rs", "go"][i % 3]);
            let content = sample_source(&path, &format!("f{}", i));
            SourceUnit::new(path, content)
        })
        .collect();

    let first = run(&units);
    let second = run(&units);
    assert_eq!(first, second);

    let cache = OutlineCache::new();
    let config = OutlineConfig::default();
    let registry = config.registry();
    let cached = OutlineEngine::new(config, &registry)
        .unwrap()
        .with_cache(cache.clone())
        .run(&units)
        .unwrap();
    assert_eq!(first, cached);
    assert_eq!(cache.len(), 30);
}

#[test]
fn flat_file_lists_every_top_level_declaration_in_order() {
    let n = 12;
    let content: String = (0..n)
        .map(|i| format!("def fn_{:02}(x):\n    return x + {}\n\n", i, i))
        .collect();
    let records = run(&[SourceUnit::new("flat.py", content)]);

    let lines: Vec<_> = records[0].text.lines().skip(1).collect();
    assert_eq!(lines.len(), n);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("fn def fn_{:02}(x):", i));
    }
}

#[test]
fn malformed_file_keeps_prefix_and_spares_siblings() {
    init_tracing();
    let units = [
        SourceUnit::new("before.py", "def before():\n    pass\n"),
        SourceUnit::new(
            "broken.py",
            "def first():\n    pass\n\nclass Second:\n    pass\n\ndef third(:\n    pass\n",
        ),
        SourceUnit::new("after.rs", "fn after() {}\n"),
    ];

    let records = run(&units);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].text, "before.py\nfn def before():\n");
    assert!(records[1].text.contains("fn def first():"));
    assert!(records[1].text.contains("class class Second:"));
    assert!(!records[1].text.contains("third"));
    assert_eq!(records[2].text, "after.rs\nfn fn after()\n");
}

#[test]
fn empty_and_declaration_free_files_still_get_records() {
    let records = run(&[
        SourceUnit::new("empty.py", ""),
        SourceUnit::new("script.py", "print('hello')\n"),
    ]);
    assert_eq!(
        records,
        vec![OutlineRecord::empty("empty.py"), OutlineRecord::empty("script.py")]
    );
}

#[test]
fn invalid_input_is_reported_before_any_work() {
    let config = OutlineConfig::default();
    let registry = config.registry();
    let engine = OutlineEngine::new(config, &registry).unwrap();
    let units = [
        SourceUnit::new("fine.py", "def ok():\n    pass\n"),
        SourceUnit::new("fine.txt", ""),
        SourceUnit::new("", "def orphan():\n    pass\n"),
    ];

    match engine.run(&units) {
        Err(OutlineError::InvalidBatchInput { index, reason }) => {
            assert_eq!(index, 2);
            assert!(reason.contains("empty"));
        }
        other => panic!("expected InvalidBatchInput, got {:?}", other),
    }
}

#[test]
fn cancellation_is_all_or_nothing() {
    let units: Vec<_> = (0..200)
        .map(|i| {
            let path = format!("gen/m{}.py", i);
            let body: String = (0..40)
                .map(|j| format!("def f_{}_{}(a, b):\n    return a * b\n\n", i, j))
                .collect();
            SourceUnit::new(path, body)
        })
        .collect();

    let config = OutlineConfig {
        worker_threads: Some(2),
        ..OutlineConfig::default()
    };
    let registry = config.registry();
    let engine = OutlineEngine::new(config, &registry).unwrap();

    let token = CancellationToken::new();
    let canceller = {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(5));
            token.cancel();
        })
    };
    let result = engine.run_with_cancel(&units, &token);
    canceller.join().unwrap();

    match result {
        Ok(records) => assert_eq!(records.len(), units.len()),
        Err(OutlineError::Cancelled) => {}
        Err(other) => panic!("unexpected error: {}", other),
    }

    // A token cancelled up front never yields records
    let cancelled = CancellationToken::new();
    cancelled.cancel();
    assert!(matches!(
        engine.run_with_cancel(&units, &cancelled),
        Err(OutlineError::Cancelled)
    ));
}

#[test]
fn config_extensions_route_files() {
    let config =
        OutlineConfig::from_json_str(r#"{"extensions": {".pyw": "python"}, "indent_unit": "    "}"#)
            .unwrap();
    let registry = config.registry();
    let engine = OutlineEngine::new(config, &registry).unwrap();

    let records = engine
        .run(&[SourceUnit::new(
            "tool.PYW",
            "class Tool:\n    def run(self):\n        pass\n",
        )])
        .unwrap();

    assert_eq!(
        records[0].text,
        "tool.PYW\nclass class Tool:\n    method def run(self):\n"
    );
}

#[test]
fn outline_costs_fewer_tokens_than_source() {
    let source = "def load(path):\n    with open(path) as fh:\n        data = fh.read()\n    return data.splitlines()\n\n\ndef save(path, lines):\n    with open(path, 'w') as fh:\n        fh.write('\\n'.join(lines))\n";
    let records = run(&[SourceUnit::new("io.py", source)]);
    let outline_tokens = records[0].estimated_tokens();
    let source_tokens = outline_core::TokenEstimator::new().estimate_string_hybrid(source);
    assert!(outline_tokens > 0);
    assert!(outline_tokens < source_tokens);
}
