pub mod fixture;
mod flow_test;
