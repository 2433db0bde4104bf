mod tests_declaration_shapes;
mod tests_scope_chain;
