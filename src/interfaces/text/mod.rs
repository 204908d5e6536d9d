pub mod board_writer;
