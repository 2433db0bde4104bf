mod tests_codemod;
