mod tests_routes;
