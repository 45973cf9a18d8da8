mod profile_lifecycle;
