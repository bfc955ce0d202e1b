// Dweve DataNote - Unified Semi-Structured Data Engine
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Parse and present throughput for the built-in processors.
//!
//! Inputs are synthetic record sets of growing size, rendered once per
//! format so that every processor reads the same data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use datanote::csv::{CsvConfig, CsvProcessor, FieldTyping, HeaderMode};
use datanote::json::{JexisProcessor, JsonProcessor};
use datanote::{DataNote, Processor};

const SIZES: [usize; 3] = [10, 100, 1_000];

fn records(count: usize) -> DataNote {
    DataNote::array((0..count).map(|i| {
        DataNote::table([
            ("id", DataNote::from(i as i64)),
            ("name", DataNote::from(format!("user-{i}"))),
            ("score", DataNote::from(i as f64 / 8.0)),
            ("active", DataNote::boole(i % 3 == 0)),
            ("note", if i % 5 == 0 { DataNote::void() } else { DataNote::from("a, \"quoted\" note") }),
        ])
    }))
}

fn keyed_csv() -> CsvProcessor {
    let config = CsvConfig::builder()
        .header(HeaderMode::Keys)
        .typing(FieldTyping::Json)
        .build()
        .expect("valid dialect");
    CsvProcessor::with_config(config).expect("valid config")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let processors: [(&str, Box<dyn Processor>); 3] = [
        ("json", Box::new(JsonProcessor::new())),
        ("jexis", Box::new(JexisProcessor::new())),
        ("csv", Box::new(keyed_csv())),
    ];

    for size in SIZES {
        let tree = records(size);
        for (name, processor) in &processors {
            let text = processor.present(&tree).expect("presentable");
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(*name, size), &text, |b, text| {
                b.iter(|| processor.parse(black_box(text)).expect("parses"))
            });
        }
    }
    group.finish();
}

fn bench_present(c: &mut Criterion) {
    let mut group = c.benchmark_group("present");
    let json = JsonProcessor::new();
    let csv = keyed_csv();

    for size in SIZES {
        let tree = records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("json", size), &tree, |b, tree| {
            b.iter(|| json.present(black_box(tree)).expect("presents"))
        });
        group.bench_with_input(BenchmarkId::new("json_pretty", size), &tree, |b, tree| {
            b.iter(|| json.present_pretty(black_box(tree)).expect("presents"))
        });
        group.bench_with_input(BenchmarkId::new("csv", size), &tree, |b, tree| {
            b.iter(|| csv.present(black_box(tree)).expect("presents"))
        });
    }
    group.finish();
}

fn bench_set_at(c: &mut Criterion) {
    let tree = records(1_000);
    let path = [DataNote::from(500), DataNote::from("name")];
    c.bench_function("set_at/1000", |b| {
        b.iter(|| tree.set_at(black_box(&path), "renamed").expect("writable"))
    });
}

criterion_group!(benches, bench_parse, bench_present, bench_set_at);
criterion_main!(benches);
