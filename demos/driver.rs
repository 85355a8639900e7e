//! Exercises the cursor contract end to end: a mix of inserts, appends and
//! cursor moves, a rejected out-of-range seek, then an enumeration of the
//! result. Expected output:
//!
//! ```text
//! 7
//! 4, 2, 3, 1, 10, 5, -6,
//! ```

use cursor_list::CursorList;

fn main() {
    let mut list = CursorList::new();
    list.append(1);
    list.insert(3);
    list.move_prev();
    list.insert(2);
    list.move_to_start();
    list.move_prev();
    list.insert(4);
    list.append(5);
    list.move_next();
    list.append(-6);
    // out of range: the cursor stays where it was
    assert!(list.move_to(9).is_err());
    list.insert(10);
    println!("{}", list.len());
    print_list(&mut list);
}

fn print_list(list: &mut CursorList<i32>) {
    list.move_to_start();
    for _ in 0..list.len() {
        if let Some(value) = list.current() {
            print!("{}, ", value);
        }
        list.move_next();
    }
    println!();
}
