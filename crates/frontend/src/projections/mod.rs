pub mod p900_reports;
