mod helpers;

mod constraint_test;
mod deletion_test;
