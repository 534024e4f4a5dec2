//! algokata Catalog Tour
//!
//! This example walks through the whole catalog:
//! - Predicates over numbers, strings, and board positions
//! - Selection of extrema and indices
//! - Roman numeral and digit-word conversion
//! - Spiral generation and in-place rotation
//! - Shuffling with cycle detection and next-permutation stepping

use std::time::Instant;

use algokata::prelude::*;

fn main() {
    println!("{}", "=".repeat(80));
    println!("algokata Catalog Tour");
    println!("{}", "=".repeat(80));
    println!();

    example_1_predicates();
    example_2_selection();
    example_3_conversion();
    example_4_spiral_and_rotation();
    example_5_shuffle_cycles();
    example_6_next_permutation();
}

/// Example 1: Predicates
/// Boolean checks over numbers, strings, and board positions
fn example_1_predicates() {
    println!("Example 1: Predicates");
    println!("{}", "-".repeat(80));

    println!("is_positive(-3)             = {}", is_positive(-3));
    println!("is_positive(0)              = {}", is_positive(0));
    println!(
        "is_isosceles_triangle(2,3,2) = {}",
        is_isosceles_triangle(2, 3, 2)
    );
    println!(
        "is_isosceles_triangle(3,4,5) = {}",
        is_isosceles_triangle(3, 4, 5)
    );
    println!("is_palindrome(\"0123210\")    = {}", is_palindrome("0123210"));
    println!("contains_digit(123450, 6)   = {}", contains_digit(123450, 6));

    let queen = Position::new(3, 3);
    for king in [Position::new(3, 7), Position::new(6, 0), Position::new(5, 6)] {
        println!(
            "queen at (3, 3) vs king at ({}, {}) -> capture: {}",
            king.x,
            king.y,
            can_queen_capture_king(queen, king)
        );
    }

    println!();
}

/// Example 2: Selection
/// Extrema and index searches
fn example_2_selection() {
    println!("Example 2: Selection");
    println!("{}", "-".repeat(80));

    println!("max_of_three(-5, -8, -7)        = {}", max_of_three(-5, -8, -7));
    println!("index_of(\"qwerty\", 't')         = {}", index_of("qwerty", 't'));
    println!("index_of(\"qwerty\", 'Q')         = {}", index_of("qwerty", 'Q'));
    println!(
        "balance_index(&[1, 2, 5, 3, 0]) = {}",
        balance_index(&[1, 2, 5, 3, 0])
    );

    println!();
}

/// Example 3: Conversion
/// Roman numerals and spelled-out decimal strings
fn example_3_conversion() {
    println!("Example 3: Conversion");
    println!("{}", "-".repeat(80));

    for num in [1, 4, 9, 14, 26, 39] {
        println!("{:>2} -> {}", num, to_roman_numerals(num));
    }
    println!("\"1950.2\" -> \"{}\"", spell_out_number("1950.2"));
    println!("\"-10\"    -> \"{}\"", spell_out_number("-10"));

    println!();
}

/// Example 4: Spiral and Rotation
/// Building a spiral matrix and turning it in place
fn example_4_spiral_and_rotation() {
    println!("Example 4: Spiral and Rotation");
    println!("{}", "-".repeat(80));

    let mut grid = spiral_matrix(4);
    println!("spiral_matrix(4):");
    print_grid(&grid);

    rotate_clockwise(&mut grid);
    println!("after rotate_clockwise:");
    print_grid(&grid);

    println!();
}

/// Example 5: Shuffle Cycles
/// Odd/even shuffling with cycle detection on a huge iteration count
fn example_5_shuffle_cycles() {
    println!("Example 5: Shuffle Cycles");
    println!("{}", "-".repeat(80));

    let input = "012345";
    for iterations in 0..=4 {
        println!(
            "shuffle_chars({:?}, {}) = {:?}",
            input,
            iterations,
            shuffle_chars(input, iterations)
        );
    }

    let start = Instant::now();
    let shuffled = shuffle_chars("the quick brown fox jumps over the lazy dog", u64::MAX);
    let duration = start.elapsed();
    println!(
        "u64::MAX iterations on a 43-char string in {:?}: {:?}",
        duration, shuffled
    );

    println!();
}

/// Example 6: Next Permutation
/// Stepping a number to its nearest bigger digit rearrangement
fn example_6_next_permutation() {
    println!("Example 6: Next Permutation");
    println!("{}", "-".repeat(80));

    for n in [12345, 90822, 321321, 54321] {
        println!("next_bigger_number({}) = {}", n, next_bigger_number(n));
    }

    let mut n = 123;
    print!("chain from 123:");
    loop {
        let next = next_bigger_number(n);
        if next == n {
            break;
        }
        print!(" {}", next);
        n = next;
    }
    println!();

    println!();
}

fn print_grid(grid: &[Vec<u32>]) {
    for row in grid {
        print!(" ");
        for value in row {
            print!(" {:>3}", value);
        }
        println!();
    }
}
