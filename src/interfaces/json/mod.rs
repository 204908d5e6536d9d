pub mod puzzle_reader;
