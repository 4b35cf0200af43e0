mod cache_properties;
