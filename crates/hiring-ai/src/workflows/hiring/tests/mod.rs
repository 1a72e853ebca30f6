mod common;
mod report;
mod scoring;
mod selection;
