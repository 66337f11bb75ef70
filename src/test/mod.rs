
mod test_heuristics;
mod test_level_pack;
mod test_moves;
mod test_solution;
