mod interpreter_tests;
mod keypad_tests;
