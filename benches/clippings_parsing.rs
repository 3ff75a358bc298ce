use std::hint::black_box;
use std::io::Write;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kindle_clippings::clippings_from_path;
use tempfile::NamedTempFile;

/// Generate a synthetic My Clippings.txt file with N blocks, every 20th one malformed
fn generate_clippings_file(num_blocks: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    for i in 0..num_blocks {
        if i % 20 == 19 {
            writeln!(file, "Broken Book {}\n- Your Highlight Location {} | Added on\n", i, i).unwrap();
        } else {
            writeln!(
                file,
                "Book {} (Author {})\n- Your Highlight on Page {} | Location {}-{} | Added on Friday, December {}, 2014, 08:51 AM\n\nHighlighted passage number {}",
                i % 50,
                i % 50,
                i % 400 + 1,
                i * 10,
                i * 10 + 3,
                (i % 28) + 1,
                i
            )
            .unwrap();
        }
        writeln!(file, "==========").unwrap();
    }

    file.flush().unwrap();
    file
}

fn bench_parse_clippings(c: &mut Criterion) {
    let mut group = c.benchmark_group("clippings_from_path");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let file = generate_clippings_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| clippings_from_path(black_box(file.path())).unwrap().count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_clippings);
criterion_main!(benches);
