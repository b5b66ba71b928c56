use criterion::{Criterion, black_box, criterion_group, criterion_main};

use densglobe_grid::{DatasetDescriptor, DatasetOrigin, GridDataset, GridMetadata, HueRange};
use densglobe_mesh_cpu::{BoxStyle, build_box_field, build_globe_mesh};

fn synthetic(name: &str, rows: usize, cols: usize, seed: u32) -> DatasetDescriptor {
    let mut state = seed;
    let grid: Vec<Vec<Option<f32>>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    // xorshift32
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    if state % 3 == 0 {
                        None
                    } else {
                        Some((state % 10_000) as f32)
                    }
                })
                .collect()
        })
        .collect();
    let meta = GridMetadata {
        xllcorner: -180.0,
        yllcorner: -90.0,
        ..GridMetadata::default()
    };
    DatasetDescriptor {
        name: name.into(),
        hue_range: HueRange::new(0.7, 0.3),
        dataset: GridDataset::from_rows(meta, grid).unwrap(),
        origin: DatasetOrigin::Loaded {
            path: format!("{name}.asc").into(),
        },
    }
}

fn bench_box_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_field");
    let all = vec![
        synthetic("a", 180, 360, 0x9E37_79B9),
        synthetic("b", 180, 360, 0xC0FF_EE11),
    ];
    let style = BoxStyle::default();
    group.bench_function("single_180x360", |b| {
        b.iter(|| {
            let boxes = build_box_field(&all[0], &all, &style).unwrap();
            black_box(boxes);
        })
    });
    group.bench_function("globe_mesh_180x360", |b| {
        b.iter(|| {
            let mesh = build_globe_mesh(&all, &style).unwrap();
            black_box(mesh);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_box_field);
criterion_main!(benches);
