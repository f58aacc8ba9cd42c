pub mod late_filing;
