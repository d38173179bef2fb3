pub mod d100_row_counts;
