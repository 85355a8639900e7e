use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use cursor_list::CursorList;

const DATA: [i32; 1024] = [0; 1024];

fn append(c: &mut Criterion) {
    c.bench_function("append", |b| {
        b.iter(|| {
            let mut list = CursorList::new();
            for item in DATA.iter() {
                list.append(*item);
            }
            list
        })
    });
}

fn insert(c: &mut Criterion) {
    c.bench_function("insert", |b| {
        b.iter(|| {
            let mut list = CursorList::new();
            for item in DATA.iter() {
                list.insert(*item);
            }
            list
        })
    });
}

fn seek(c: &mut Criterion) {
    c.bench_function("seek", |b| {
        let list: CursorList<i32> = DATA.iter().copied().collect();
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.move_to(DATA.len() - 1).unwrap();
                list.position()
            },
            BatchSize::SmallInput,
        )
    });
}

fn drain(c: &mut Criterion) {
    c.bench_function("drain", |b| {
        let list: CursorList<i32> = DATA.iter().copied().collect();
        b.iter_batched(
            || list.clone(),
            |mut list| while list.remove().is_some() {},
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(cursor_list, append, insert, seek, drain);

criterion_main!(cursor_list);
