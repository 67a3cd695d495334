// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gh_stats::{RepoStatsRecord, parse_manifest, render_table, write_csv, write_json};

fn benchmark_parse_manifest(c: &mut Criterion,)
{
    let yaml = r"
Owners:
  - acme:
      - widget
      - gadget
  - octocat:
      - hello-world
";

    c.bench_function("parse_manifest_small", |b| {
        b.iter(|| parse_manifest(black_box(yaml,),).expect("parse failed",),)
    },);
}

fn benchmark_large_manifest_flatten(c: &mut Criterion,)
{
    let mut yaml = String::from("Owners:\n",);
    for owner in 0..20 {
        yaml.push_str(&format!("  - owner{owner}:\n"),);
        for repo in 0..25 {
            yaml.push_str(&format!("      - repo{repo}\n"),);
        }
    }

    c.bench_function("flatten_500_targets", |b| {
        b.iter(|| {
            let manifest = parse_manifest(black_box(&yaml,),).expect("parse failed",);
            black_box(manifest.targets().expect("flatten failed",).len(),)
        },)
    },);
}

fn sample_records(count: u64,) -> Vec<RepoStatsRecord,>
{
    (0..count)
        .map(|i| RepoStatsRecord {
            repo:          format!("owner/repo{i}"),
            forks:         i,
            stars:         i * 10,
            watchers:      i * 10,
            clones_total:  i * 3,
            clones_unique: i,
            views_total:   i * 7,
            views_unique:  i * 2,
        },)
        .collect()
}

fn benchmark_renderers(c: &mut Criterion,)
{
    let records = sample_records(200,);

    c.bench_function("render_table_200", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(64 * 1024,);
            render_table(&mut buffer, black_box(&records,),).expect("table failed",);
            black_box(buffer.len(),)
        },)
    },);

    c.bench_function("write_csv_200", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(16 * 1024,);
            write_csv(&mut buffer, black_box(&records,),).expect("csv failed",);
            black_box(buffer.len(),)
        },)
    },);

    c.bench_function("write_json_200", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(64 * 1024,);
            write_json(&mut buffer, black_box(&records,),).expect("json failed",);
            black_box(buffer.len(),)
        },)
    },);
}

criterion_group!(
    benches,
    benchmark_parse_manifest,
    benchmark_large_manifest_flatten,
    benchmark_renderers
);
criterion_main!(benches);
