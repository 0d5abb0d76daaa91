//! gridcalc_engine - Spreadsheet evaluation engine (SUM/MUL/AVG formulas).

pub mod engine;
