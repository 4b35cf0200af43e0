mod matcher_properties;
