mod boundary;
mod gfile;
mod hts_verbose;
mod math;
mod statusor_examples;
