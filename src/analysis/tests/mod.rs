mod fixture;
mod freshness_test;
