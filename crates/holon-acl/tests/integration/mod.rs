mod concurrency;
mod filtering;
mod policy_file;
mod scenarios;
