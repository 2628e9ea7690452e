//! Map 30 integers, sort them through the reverse cursors and print them
//!
//! The file is left behind so it can be inspected or mapped again.

use mapper::{algorithm, map, Result};

fn main() -> Result<()> {
    let mut numbers = map::<i32, _>("my_map.bin", 30)?;

    for i in 0..numbers.len() {
        numbers[i] = i as i32;
    }

    let (rbegin, rend) = numbers.rbounds_mut();
    algorithm::sort(rbegin, rend);

    let line: Vec<String> = numbers.iter().map(|item| item.to_string()).collect();
    println!("{}", line.join(" "));
    Ok(())
}
