use std::io;

use parlor_palindrome::classify;

pub fn run() -> Result<(), String> {
    println!("Palindrome Checker (type 'exit' or 'quit' to terminate the program)");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let Some(input) = super::prompt_line(&mut reader, "\nEnter a string: ")? else {
            break; // EOF
        };

        // Exact match only; any other casing is classified like normal
        // input.
        if input == "exit" || input == "quit" {
            println!("Exiting program...");
            break;
        }

        println!("{}", classify(&input));
    }

    Ok(())
}
