pub mod use_gdp;
