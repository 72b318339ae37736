mod reset_to_earlier_commit;
