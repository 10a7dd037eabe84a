pub mod psql;
