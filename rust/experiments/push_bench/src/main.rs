use std::time::Instant;

use dynarray::DynamicArray;

fn main() {
    let count = 64 * 1024 * 1024 + std::env::args().count();

    let t0 = Instant::now();
    let pushed = dynamic_array_push(count);
    println!("DynamicArray: {pushed} pushes, elapsed: {:?}", t0.elapsed());

    let t0 = Instant::now();
    let pushed = vec_push(count);
    println!("Vec:          {pushed} pushes, elapsed: {:?}", t0.elapsed());

    let t0 = Instant::now();
    let remaining = front_insert_remove(16 * 1024);
    println!("front insert/remove: {remaining} left, elapsed: {:?}", t0.elapsed());
}

#[inline(never)]
fn dynamic_array_push(count: usize) -> usize {
    let mut values = DynamicArray::new();
    for i in 0..count {
        values.push(i as i64);
    }
    values.len()
}

#[inline(never)]
fn vec_push(count: usize) -> usize {
    let mut values = Vec::new();
    for i in 0..count {
        values.push(i as i64);
    }
    values.len()
}

#[inline(never)]
fn front_insert_remove(count: usize) -> usize {
    let mut values = DynamicArray::new();
    for i in 0..count {
        values.insert(0, i).expect("front insert");
    }
    for _ in 0..count / 2 {
        values.remove(0).expect("front remove");
    }
    values.len()
}
