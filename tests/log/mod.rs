mod show_history_from_head;
